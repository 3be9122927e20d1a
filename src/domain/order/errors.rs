// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("name is required")]
    NameRequired,

    #[error("cake type is required")]
    CakeTypeRequired,
}
