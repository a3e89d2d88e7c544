mod user_queries;
