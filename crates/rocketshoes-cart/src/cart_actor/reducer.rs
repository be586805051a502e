//! Pure cart transitions.
//!
//! The actor fetches whatever the catalog has to say first, then asks
//! [`CartReducer::reduce`] what the lines become. Nothing in here awaits, logs or
//! touches storage, so every rule of the cart can be tested synchronously.

use crate::model::{Product, ProductId, ProductInfo, Stock};
use serde::{Deserialize, Serialize};

/// How strictly `SetAmount` is checked against stock.
///
/// The storefront has always compared the line's *current* amount with stock, so
/// a request for more units than exist goes through as long as the cart was in
/// stock before. `validate_requested_amount` checks the requested amount instead,
/// and rejects 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPolicy {
    pub validate_requested_amount: bool,
}

/// A mutation with its remote data already fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    Add {
        product: ProductInfo,
        stock: Stock,
    },
    Remove {
        product_id: ProductId,
    },
    SetAmount {
        product_id: ProductId,
        amount: u32,
        stock: Stock,
        policy: StockPolicy,
    },
}

/// Why a transition was refused. The lines are left as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
    NotInCart(ProductId),
    AboveStock {
        product_id: ProductId,
        amount: u32,
        available: u32,
    },
    ZeroAmount(ProductId),
}

pub struct CartReducer;

impl CartReducer {
    pub fn reduce(mut lines: Vec<Product>, intent: CartIntent) -> Result<Vec<Product>, Rejection> {
        match intent {
            CartIntent::Add { product, stock } => {
                match lines.iter_mut().find(|line| line.id == product.id) {
                    // New lines are not checked against stock.
                    None => lines.push(Product::from_info(product, 1)),
                    Some(line) => {
                        let requested = line.amount.saturating_add(1);
                        if requested > stock.amount {
                            return Err(Rejection::OutOfStock {
                                product_id: product.id,
                                requested,
                                available: stock.amount,
                            });
                        }
                        line.amount = requested;
                    }
                }
                Ok(lines)
            }

            CartIntent::Remove { product_id } => {
                lines.retain(|line| line.id != product_id);
                Ok(lines)
            }

            CartIntent::SetAmount {
                product_id,
                amount,
                stock,
                policy,
            } => {
                let line = lines
                    .iter_mut()
                    .find(|line| line.id == product_id)
                    .ok_or(Rejection::NotInCart(product_id))?;

                let checked = if policy.validate_requested_amount {
                    if amount == 0 {
                        return Err(Rejection::ZeroAmount(product_id));
                    }
                    amount
                } else {
                    line.amount
                };

                if checked > stock.amount {
                    return Err(Rejection::AboveStock {
                        product_id,
                        amount: checked,
                        available: stock.amount,
                    });
                }

                line.amount = amount;
                Ok(lines)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: u32) -> ProductInfo {
        ProductInfo {
            id: ProductId(id),
            title: "Tênis VR Caminhada Confortável Detalhes Couro Masculino".into(),
            price: 139.9,
            image: "tenis2.jpg".into(),
        }
    }

    fn line(id: u32, amount: u32) -> Product {
        Product::from_info(info(id), amount)
    }

    fn stock(id: u32, amount: u32) -> Stock {
        Stock {
            id: ProductId(id),
            amount,
        }
    }

    fn set_amount(id: u32, amount: u32, available: u32, strict: bool) -> CartIntent {
        CartIntent::SetAmount {
            product_id: ProductId(id),
            amount,
            stock: stock(id, available),
            policy: StockPolicy {
                validate_requested_amount: strict,
            },
        }
    }

    #[test]
    fn add_appends_new_product_with_one_unit() {
        let lines = CartReducer::reduce(
            vec![],
            CartIntent::Add {
                product: info(2),
                stock: stock(2, 5),
            },
        )
        .unwrap();

        assert_eq!(lines, vec![line(2, 1)]);
    }

    #[test]
    fn add_appends_at_the_end() {
        let lines = CartReducer::reduce(
            vec![line(4, 2)],
            CartIntent::Add {
                product: info(1),
                stock: stock(1, 3),
            },
        )
        .unwrap();

        let ids: Vec<_> = lines.iter().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![4, 1]);
    }

    #[test]
    fn add_increments_while_in_stock() {
        let lines = CartReducer::reduce(
            vec![line(2, 4)],
            CartIntent::Add {
                product: info(2),
                stock: stock(2, 5),
            },
        )
        .unwrap();

        assert_eq!(lines[0].amount, 5);
    }

    #[test]
    fn add_past_stock_is_rejected() {
        let rejection = CartReducer::reduce(
            vec![line(2, 5)],
            CartIntent::Add {
                product: info(2),
                stock: stock(2, 5),
            },
        )
        .unwrap_err();

        assert_eq!(
            rejection,
            Rejection::OutOfStock {
                product_id: ProductId(2),
                requested: 6,
                available: 5,
            }
        );
    }

    #[test]
    fn remove_filters_and_tolerates_absent() {
        let lines = CartReducer::reduce(
            vec![line(1, 1), line(2, 2)],
            CartIntent::Remove {
                product_id: ProductId(1),
            },
        )
        .unwrap();
        assert_eq!(lines, vec![line(2, 2)]);

        let unchanged = CartReducer::reduce(
            lines.clone(),
            CartIntent::Remove {
                product_id: ProductId(9),
            },
        )
        .unwrap();
        assert_eq!(unchanged, lines);
    }

    #[test]
    fn set_amount_checks_current_amount_by_default() {
        // Current amount 2 is within stock 3, so 10 is accepted.
        let lines = CartReducer::reduce(vec![line(1, 2)], set_amount(1, 10, 3, false)).unwrap();
        assert_eq!(lines[0].amount, 10);

        // Current amount 4 is already above stock 3.
        let rejection =
            CartReducer::reduce(vec![line(1, 4)], set_amount(1, 1, 3, false)).unwrap_err();
        assert_eq!(
            rejection,
            Rejection::AboveStock {
                product_id: ProductId(1),
                amount: 4,
                available: 3,
            }
        );
    }

    #[test]
    fn set_amount_on_missing_line_is_rejected() {
        let rejection =
            CartReducer::reduce(vec![line(1, 1)], set_amount(7, 1, 3, false)).unwrap_err();
        assert_eq!(rejection, Rejection::NotInCart(ProductId(7)));
    }

    #[test]
    fn strict_policy_checks_requested_amount() {
        let rejection =
            CartReducer::reduce(vec![line(1, 1)], set_amount(1, 10, 3, true)).unwrap_err();
        assert!(matches!(rejection, Rejection::AboveStock { amount: 10, .. }));

        let rejection =
            CartReducer::reduce(vec![line(1, 1)], set_amount(1, 0, 3, true)).unwrap_err();
        assert_eq!(rejection, Rejection::ZeroAmount(ProductId(1)));

        let lines = CartReducer::reduce(vec![line(1, 5)], set_amount(1, 3, 3, true)).unwrap();
        assert_eq!(lines[0].amount, 3);
    }
}
