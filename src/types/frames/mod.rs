pub mod daily_indicator_frame;
pub mod daily_series;
pub mod monthly_frame;
pub mod yearly_frame;
