#[derive(filterkit::FilterEntity)]
pub struct Person {
    #[column_name = ""]
    pub id: i32,
}

fn main() {}
