//! Property tests for push/pop round trips and array extraction order

use std::rc::Rc;

use proptest::prelude::*;
use vm_interop::{
    BigInt, DefaultItemFactory, ExecutionContext, InteropObject, ScriptContext, StackAccessor,
    StackItem, UInt160,
};

#[derive(Debug)]
struct Coin(u16);

#[derive(Debug)]
struct Other;

fn context() -> ScriptContext {
    ScriptContext::new(UInt160::ZERO)
}

proptest! {
    #[test]
    fn prop_i64_round_trip(value in any::<i64>()) {
        let factory = DefaultItemFactory;
        let mut ctx = context();
        let mut accessor = StackAccessor::new(&factory, &mut ctx);
        accessor.push(value).unwrap();
        prop_assert_eq!(accessor.pop_integer().unwrap(), Some(BigInt::from(value)));
    }

    #[test]
    fn prop_u64_round_trip(value in any::<u64>()) {
        let factory = DefaultItemFactory;
        let mut ctx = context();
        let mut accessor = StackAccessor::new(&factory, &mut ctx);
        accessor.push(value).unwrap();
        prop_assert_eq!(accessor.pop_integer().unwrap(), Some(BigInt::from(value)));
    }

    #[test]
    fn prop_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let factory = DefaultItemFactory;
        let mut ctx = context();
        let mut accessor = StackAccessor::new(&factory, &mut ctx);
        accessor.push(bytes.clone()).unwrap();
        prop_assert_eq!(accessor.peek_byte_array(0), Some(bytes.clone()));
        prop_assert_eq!(accessor.pop_byte_array().unwrap(), Some(bytes));
    }

    #[test]
    fn prop_pop_array_keeps_matching_order(mask in proptest::collection::vec(any::<bool>(), 0..32)) {
        let factory = DefaultItemFactory;
        let mut ctx = context();

        // true -> Coin(i), false -> Other
        let children: Vec<StackItem> = mask
            .iter()
            .enumerate()
            .map(|(i, is_coin)| {
                if *is_coin {
                    StackItem::Interop(InteropObject::new(Rc::new(Coin(i as u16))))
                } else {
                    StackItem::Interop(InteropObject::new(Rc::new(Other)))
                }
            })
            .collect();

        ctx.evaluation_stack_mut()
            .push(StackItem::Array(children))
            .unwrap();

        let mut accessor = StackAccessor::new(&factory, &mut ctx);
        let coins = accessor.pop_array::<Coin>().unwrap().unwrap();

        let expected: Vec<u16> = mask
            .iter()
            .enumerate()
            .filter(|(_, is_coin)| **is_coin)
            .map(|(i, _)| i as u16)
            .collect();
        let actual: Vec<u16> = coins.iter().map(|c| c.0).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_homogeneous_array_round_trip(len in 0usize..64) {
        let factory = DefaultItemFactory;
        let mut ctx = context();
        let mut accessor = StackAccessor::new(&factory, &mut ctx);

        let coins: Vec<Rc<Coin>> = (0..len).map(|i| Rc::new(Coin(i as u16))).collect();
        accessor.push_interop_array(&coins).unwrap();

        let popped = accessor.pop_array::<Coin>().unwrap().unwrap();
        prop_assert_eq!(popped.len(), len);
        for (a, b) in popped.iter().zip(&coins) {
            prop_assert!(Rc::ptr_eq(a, b));
        }
    }
}
