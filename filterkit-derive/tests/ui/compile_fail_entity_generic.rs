#[derive(filterkit::FilterEntity)]
pub struct Wrapper<T> {
    pub value: T,
}

fn main() {}
