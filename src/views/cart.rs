use crate::cart::Cart;
use crate::constants::CURRENCY_SYMBOL;

/// Prices print without decimals when they are whole numbers
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}{:.0}", CURRENCY_SYMBOL, price)
    } else {
        format!("{}{:.2}", CURRENCY_SYMBOL, price)
    }
}

pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty\nAdd courses to get started".to_string();
    }

    let mut out = String::new();
    for item in cart.items() {
        out.push_str(&format!(
            "{}  {}  [{}]\n",
            item.course_name,
            format_price(item.price),
            item.id
        ));
    }
    out.push_str(&format!("\nTotal: {}", format_price(cart.total())));
    out
}
