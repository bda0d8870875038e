pub mod bar_chart;
pub mod date_range_picker;
pub mod kpi_card;
pub mod select;
