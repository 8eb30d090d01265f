pub mod a002_spare_part;
