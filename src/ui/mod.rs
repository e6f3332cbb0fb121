/// Browser bindings for the admin pages
pub mod browser;
pub mod domain_list;
pub mod page;
pub mod panels;
