//! Prompt for the marketing-strategy request.

use retailiq_products::Product;

/// Four strategies: sell fast, waste prevention, bundling, loyalty.
pub fn build_prompt(product: &Product, reason: &str) -> String {
    format!(
        "You are a world-class retail analytics expert.
Provide 4 distinct, high-impact marketing strategies to maximize sales and minimize waste for this product.

Context:
- Product: {name}
- Category: {category}
- Price: ${price}
- Stock: {stock} units
- Current Situation: {reason}

Specific Strategic Requirements:
1. SELL FAST STRATEGY: A plan focused purely on increasing transaction volume immediately (e.g. volume discounts, high-visibility positioning).
2. WASTE PREVENTION STRATEGY: If close to expiry, suggest aggressive clearance or alternative usage (e.g. donation for tax credit, bundling with non-perishables).
3. STRATEGIC BUNDLING: Suggest a specific pairing with another item in the store to increase basket size.
4. LOYALTY ENGAGEMENT: A way to use this product to drive repeat store visits.

Response Format: Return a raw JSON array of objects with keys \"type\" (one of DISCOUNT, BUNDLE, FLASH_SALE, LOYALTY, BOGO), \"title\", and \"description\".
Ensure strategies are concrete and actionable. Do not use generic filler text.
",
        name = product.name,
        category = product.category,
        price = product.selling_price,
        stock = product.current_stock,
    )
}
