#[derive(filterkit::FilterObject)]
pub struct ByName {
    #[property_name = "  "]
    pub first_name: String,
}

fn main() {}
