//! # Stripe Checkout Sessions
//!
//! Form encoding for `POST /v1/checkout/sessions`.
//! Stripe takes nested parameters in bracket notation, e.g.
//! `line_items[0][price_data][currency]=usd`.

use relay_core::{CheckoutSessionRequest, LineItemPrice};

/// Build the form parameters for a checkout session
pub fn session_form(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut form_params: Vec<(String, String)> = vec![
        ("mode".to_string(), request.mode.as_str().to_string()),
        ("success_url".to_string(), request.success_url.clone()),
        ("cancel_url".to_string(), request.cancel_url.clone()),
    ];

    for (i, item) in request.line_items.iter().enumerate() {
        match &item.price {
            LineItemPrice::PriceData {
                currency,
                unit_amount_decimal,
                product_data,
            } => {
                form_params.push((
                    format!("line_items[{}][price_data][currency]", i),
                    currency.clone(),
                ));
                form_params.push((
                    format!("line_items[{}][price_data][unit_amount_decimal]", i),
                    unit_amount_decimal.clone(),
                ));
                form_params.push((
                    format!("line_items[{}][price_data][product_data][name]", i),
                    product_data.name.clone(),
                ));
                if let Some(description) = &product_data.description {
                    form_params.push((
                        format!("line_items[{}][price_data][product_data][description]", i),
                        description.clone(),
                    ));
                }
            }
            LineItemPrice::Price(price) => {
                form_params.push((format!("line_items[{}][price]", i), price.clone()));
            }
        }
        form_params.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    form_params
}
