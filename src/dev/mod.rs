/// Development utilities module
///
/// This module contains utilities for development and testing,
/// such as an in-memory asset provider.

pub mod mock_provider;
