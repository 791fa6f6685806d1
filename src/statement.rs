//! SQL statement templates.
//!
//! Text values are interpolated verbatim between single quotes. A value
//! that itself contains a quote produces a malformed statement; callers
//! can detect this with [`needs_escaping`].

/// Table name for customers (not a reserved word, left unquoted)
pub const CUSTOMER_TABLE: &str = "customer";
/// Table name for orders, quoted because `order` is reserved in most dialects
pub const ORDER_TABLE: &str = "\"order\"";
pub const PRODUCT_TABLE: &str = "product";
pub const ORDER_PRODUCT_TABLE: &str = "order_product";

pub fn customer_insert(id: u64, name: &str) -> String {
    format!(
        "INSERT INTO {} (id, name) VALUES ({}, '{}');",
        CUSTOMER_TABLE, id, name
    )
}

pub fn order_insert(id: u64, description: &str, customer_id: u64) -> String {
    format!(
        "INSERT INTO {} (id, description, customer_id) VALUES ({}, '{}', {});",
        ORDER_TABLE, id, description, customer_id
    )
}

pub fn product_insert(id: u64, description: &str) -> String {
    format!(
        "INSERT INTO {} (id, description) VALUES ({}, '{}');",
        PRODUCT_TABLE, id, description
    )
}

pub fn order_product_insert(order_id: u64, product_id: u64) -> String {
    format!(
        "INSERT INTO {} (order_id, product_id) VALUES ({}, {});",
        ORDER_PRODUCT_TABLE, order_id, product_id
    )
}

/// CREATE TABLE statements for the seeded tables, in dependency order.
pub fn schema_statements(with_products: bool) -> Vec<String> {
    let mut stmts = vec![
        format!(
            "CREATE TABLE {} (id BIGINT PRIMARY KEY, name VARCHAR(255));",
            CUSTOMER_TABLE
        ),
        format!(
            "CREATE TABLE {} (id BIGINT PRIMARY KEY, description VARCHAR(255), customer_id BIGINT REFERENCES {} (id));",
            ORDER_TABLE, CUSTOMER_TABLE
        ),
    ];

    if with_products {
        stmts.push(format!(
            "CREATE TABLE {} (id BIGINT PRIMARY KEY, description VARCHAR(255));",
            PRODUCT_TABLE
        ));
        stmts.push(format!(
            "CREATE TABLE {} (order_id BIGINT REFERENCES {} (id), product_id BIGINT REFERENCES {} (id), PRIMARY KEY (order_id, product_id));",
            ORDER_PRODUCT_TABLE, ORDER_TABLE, PRODUCT_TABLE
        ));
    }

    stmts
}

/// True if interpolating `value` into a quoted literal would break the statement
pub fn needs_escaping(value: &str) -> bool {
    value.contains('\'')
}
