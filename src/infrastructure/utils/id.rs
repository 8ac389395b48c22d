use uuid::Uuid;

/// Generates a collection-unique record id.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
