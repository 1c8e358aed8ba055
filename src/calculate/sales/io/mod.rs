pub mod branch_list;
pub mod record_files;
pub mod summary_write;
