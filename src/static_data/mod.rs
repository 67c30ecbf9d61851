pub mod nf_json;
pub mod spec_json;
