// End-to-end tests for the My List Service API
//
// A single testcontainers PostgreSQL instance is shared by the whole suite.
// Every test leases its own database (test_db_<uuid>) from a database pool,
// so tests run in parallel without seeing each other's lists. Databases are
// truncated and recycled when the test context is dropped.

mod helpers;
mod test_health;
