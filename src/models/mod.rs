pub mod contractor;

pub use contractor::{Contractor, ContractorList, ContractorQuery, ProjectSpecialization};
