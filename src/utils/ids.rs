use uuid::Uuid;

/// Identifier for shifts and punches: creation millis plus a random suffix,
/// so ids sort roughly by creation time and never collide within a tab.
pub fn make_id(now_ms: i64) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now_ms, &random[..12])
}
