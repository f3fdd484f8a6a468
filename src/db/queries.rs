use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{BlockedDay, Booking};

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Documents are stored as JSON text; the `id` and `created_at` columns are
// authoritative and overlaid onto the decoded record on every read, so a
// stale copy inside the document body can never leak out.

// ── Bookings ──

pub fn list_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt =
        conn.prepare("SELECT id, doc, created_at FROM bookings ORDER BY created_at DESC, id DESC")?;

    let rows = stmt.query_map([], |row| {
        let id: String = row.get(0)?;
        let doc: String = row.get(1)?;
        let created_at: String = row.get(2)?;
        Ok((id, doc, created_at))
    })?;

    let mut bookings = vec![];
    for row in rows {
        let (id, doc, created_at) = row?;
        bookings.push(decode_booking_row(id, &doc, &created_at)?);
    }
    Ok(bookings)
}

pub fn get_booking(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, doc, created_at FROM bookings WHERE id = ?1",
        params![id],
        |row| {
            let id: String = row.get(0)?;
            let doc: String = row.get(1)?;
            let created_at: String = row.get(2)?;
            Ok((id, doc, created_at))
        },
    );

    match result {
        Ok((id, doc, created_at)) => Ok(Some(decode_booking_row(id, &doc, &created_at)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Full-document overwrite keyed by `booking.id`. `created_at` is set on
/// first insert (honoring an explicit value when the record carries one)
/// and preserved on conflict, matching the store-assigned-timestamp rule.
pub fn put_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<Booking> {
    let doc = serde_json::to_string(booking)?;
    let created_at = booking
        .created_at
        .unwrap_or_else(|| Utc::now().naive_utc())
        .format(TS_FORMAT)
        .to_string();

    conn.execute(
        "INSERT INTO bookings (id, doc, created_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET doc = excluded.doc",
        params![booking.id, doc, created_at],
    )?;

    // Read back so the caller sees the stored created_at.
    get_booking(conn, &booking.id)?
        .ok_or_else(|| anyhow::anyhow!("booking {} missing after write", booking.id))
}

pub fn count_pending_bookings(conn: &Connection) -> anyhow::Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE json_extract(doc, '$.status') = 'pending'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn decode_booking_row(id: String, doc: &str, created_at: &str) -> anyhow::Result<Booking> {
    let mut booking: Booking = serde_json::from_str(doc)?;
    booking.id = id;
    booking.created_at = NaiveDateTime::parse_from_str(created_at, TS_FORMAT).ok();
    Ok(booking)
}

// ── Blocked days ──

pub fn get_blocked_day(conn: &Connection, date: &str) -> anyhow::Result<Option<BlockedDay>> {
    let result = conn.query_row(
        "SELECT doc FROM blocked_days WHERE date = ?1",
        params![date],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(doc) => {
            let mut day: BlockedDay = serde_json::from_str(&doc)?;
            day.date = date.to_string();
            Ok(Some(day))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn put_blocked_day(conn: &Connection, day: &BlockedDay) -> anyhow::Result<()> {
    let doc = serde_json::to_string(day)?;
    conn.execute(
        "INSERT INTO blocked_days (date, doc) VALUES (?1, ?2)
         ON CONFLICT(date) DO UPDATE SET doc = excluded.doc",
        params![day.date, doc],
    )?;
    Ok(())
}
