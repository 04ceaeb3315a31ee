use crate::internal::common::Map;
use crate::internal::common::error::RcError;
use crate::internal::resources::{DimensionId, ResourceAmount, ResourceVector};

pub const MEMORY_DIMENSION: DimensionId = DimensionId::new(0);
pub const VCORES_DIMENSION: DimensionId = DimensionId::new(1);

pub const MEMORY_DIMENSION_NAME: &str = "memory";
pub const VCORES_DIMENSION_NAME: &str = "vcores";

/// Config-time mapping between dimension names and their positions in
/// a [`ResourceVector`]. Memory and vcores always occupy the first two slots,
/// additional dimensions are appended in registration order.
#[derive(Debug, Clone)]
pub struct DimensionRegistry {
    names: Vec<String>,
    ids: Map<String, DimensionId>,
}

impl Default for DimensionRegistry {
    fn default() -> Self {
        let mut registry = DimensionRegistry {
            names: Vec::new(),
            ids: Map::with_capacity(2),
        };
        /* Fix ids for the primary dimensions */
        registry.get_or_register(MEMORY_DIMENSION_NAME);
        registry.get_or_register(VCORES_DIMENSION_NAME);
        registry
    }
}

impl DimensionRegistry {
    pub fn with_dimensions<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut registry = Self::default();
        for name in names {
            registry.get_or_register(name);
        }
        registry
    }

    pub fn get_or_register(&mut self, name: &str) -> DimensionId {
        match self.ids.get(name) {
            Some(&id) => id,
            None => {
                let id = DimensionId::new(self.names.len() as u32);
                log::debug!("New resource dimension registered '{name}' as {id}");
                self.ids.insert(name.to_string(), id);
                self.names.push(name.to_string());
                id
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn get_index(&self, name: &str) -> Option<DimensionId> {
        self.ids.get(name).copied()
    }

    #[inline]
    pub fn get_name(&self, id: DimensionId) -> Option<&str> {
        self.names.get(usize::from(id)).map(|s| s.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    pub fn zero_vector(&self) -> ResourceVector {
        ResourceVector::zeros(self.len())
    }

    /// Builds a vector with one slot per registered dimension.
    /// Dimensions that are not mentioned are zero.
    pub fn vector_from_named(&self, amounts: &[(&str, u64)]) -> crate::Result<ResourceVector> {
        let mut vector = self.zero_vector();
        for (name, amount) in amounts {
            let id = self
                .get_index(name)
                .ok_or_else(|| RcError::UnknownDimension(name.to_string()))?;
            vector = vector.with_amount(id, ResourceAmount::new(*amount));
        }
        Ok(vector)
    }

    pub fn format_vector(&self, vector: &ResourceVector) -> String {
        let items: Vec<String> = vector
            .iter_with_ids()
            .map(|(id, amount)| match self.get_name(id) {
                Some(name) => format!("{name}:{amount}"),
                None => format!("#{id}:{amount}"),
            })
            .collect();
        format!("<{}>", items.join(", "))
    }
}
