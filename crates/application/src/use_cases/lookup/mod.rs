mod lookup_a_records;
mod lookup_txt;

pub use lookup_a_records::LookupARecordsUseCase;
pub use lookup_txt::LookupTxtUseCase;
