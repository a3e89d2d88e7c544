pub mod user_queries;
