#[derive(filterkit::FilterObject)]
pub struct ByName(pub String);

fn main() {}
