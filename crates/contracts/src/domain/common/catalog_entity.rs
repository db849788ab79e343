use super::EntityId;

/// Catalog record managed from the back office.
///
/// Carries the record id plus the static metadata of its REST collection
/// and the labels the UI shows for it.
pub trait CatalogEntity {
    // ============================================================================
    // Instance
    // ============================================================================

    /// `None` while the record is still a draft
    fn id(&self) -> Option<EntityId>;

    /// `nombre` or `titulo`
    fn display_name(&self) -> &str;

    // ============================================================================
    // Collection metadata
    // ============================================================================

    /// REST collection, e.g. "etiquetas"
    fn collection_name() -> &'static str;

    /// Singular UI label, e.g. "Etiqueta"
    fn element_name() -> &'static str;

    /// Plural UI label, e.g. "Etiquetas"
    fn list_name() -> &'static str;

    fn endpoint() -> String {
        format!("/api/{}", Self::collection_name())
    }

    fn item_endpoint(id: EntityId) -> String {
        format!("{}/{}", Self::endpoint(), id)
    }
}
