#[derive(filterkit::FilterEntity)]
#[table_name = 1]
pub struct Person {
    pub id: i32,
}

fn main() {}
