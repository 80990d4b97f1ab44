#[derive(filterkit::FilterEntity)]
pub struct Marker;

fn main() {}
