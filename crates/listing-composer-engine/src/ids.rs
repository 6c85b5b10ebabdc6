use uuid::Uuid;

/// Length of generated block and layout ids.
pub const SHORT_ID_LEN: usize = 8;

/// A short opaque id: the leading hex digits of a random v4 UUID.
pub fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHORT_ID_LEN);
    id
}
