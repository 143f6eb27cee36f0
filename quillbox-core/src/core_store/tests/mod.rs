/*
    Integration tests for the core_store subsystem

    Test suite covering:
    - End-to-end store scenarios (create/edit/delete/comment)
    - Projection filtering, sorting, and purity properties
    - File-backed persistence and recovery
*/

pub mod persistence_tests;
pub mod store_tests;
