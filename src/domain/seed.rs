//! The fixed seed set inserted into an empty catalog at startup.

use super::Product;

fn product(id: i32, name: &str, description: &str, price: f64, quantity: i32) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        quantity,
    }
}

/// Default seed records (ids 1 through 4).
pub fn default_seed_products() -> Vec<Product> {
    vec![
        product(1, "Phone", "A smartphone", 699.99, 50),
        product(2, "Laptop", "A powerful laptop", 999.99, 30),
        product(3, "Pen", "A blue ink pen", 1.99, 100),
        product(4, "Table", "A wooden table", 199.99, 20),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_four_products_with_ids_one_to_four() {
        let seeds = default_seed_products();
        let ids: Vec<i32> = seeds.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(seeds[2].name, "Pen");
        assert_eq!(seeds[2].price, 1.99);
    }
}
