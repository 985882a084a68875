pub mod bflist;
