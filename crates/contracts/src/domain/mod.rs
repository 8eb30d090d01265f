pub mod a001_site_page;
pub mod a002_spare_part;
