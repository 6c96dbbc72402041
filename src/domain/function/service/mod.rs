pub mod function_service;
