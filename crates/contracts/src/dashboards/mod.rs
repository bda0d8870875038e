pub mod sales_overview;
