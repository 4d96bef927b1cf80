pub mod lookup;

pub use lookup::{LookupARecordsUseCase, LookupTxtUseCase};
