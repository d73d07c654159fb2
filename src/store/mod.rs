pub mod visit_file;

pub use visit_file::load_visits;
