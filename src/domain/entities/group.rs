//! Group entity representing an A/B test bucket.

/// A named bucket in the A/B test that users are assigned to.
///
/// Groups are pre-populated externally and read-only from this service's
/// perspective.
#[derive(Debug, Clone)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

impl Group {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
