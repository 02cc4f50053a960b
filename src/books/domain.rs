pub mod model;

// Book is what listing filters inspect.
pub trait Book {
    fn name(&self) -> &str;
    fn is_reading(&self) -> bool;
    fn is_finished(&self) -> bool;
}
