pub mod local_storage_queries;
