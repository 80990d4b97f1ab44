use filterkit::{filter, FilterEntity, FilterObject, MemoryQuery, Range, SelectQuery};

#[derive(FilterEntity)]
#[table_name = "orders"]
pub struct Order {
    pub id: i64,
    #[column_name = "customer"]
    pub customer_name: String,
    pub total: Option<f64>,
}

#[derive(FilterObject)]
pub struct OrderFilter {
    pub customer_name: Vec<String>,
    pub total: Option<Range<f64>>,
}

fn main() {
    let by = OrderFilter {
        customer_name: vec!["acme".to_string()],
        total: Some(Range::at_least(10.0)),
    };
    let _sql = filter(SelectQuery::<Order>::new(), Some(&by)).to_sql();

    let rows = vec![Order {
        id: 1,
        customer_name: "acme".to_string(),
        total: Some(12.5),
    }];
    let _count = filter(MemoryQuery::new(&rows), Some(&by)).count();
}
