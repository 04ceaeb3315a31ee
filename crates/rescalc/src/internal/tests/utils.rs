use crate::internal::resources::ResourceVector;

pub fn rv(memory: u64, vcores: u64) -> ResourceVector {
    ResourceVector::new(memory, vcores)
}

pub fn rv3(memory: u64, vcores: u64, other: u64) -> ResourceVector {
    ResourceVector::from_values(&[memory, vcores, other])
}
