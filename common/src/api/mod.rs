pub mod api_reference;
