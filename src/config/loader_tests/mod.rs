mod mock_fs;

mod parsing_tests;
mod taxonomy_lookup_tests;
