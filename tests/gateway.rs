//! End-to-end checks against the worked examples in the gateway's
//! integration guide.

use shasign::Direction;
use shasign::HashAlgorithm;
use shasign::ParamMap;
use shasign::Signature;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The SHA-OUT example: a payment callback received from the gateway.
fn callback_params() -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("acceptance", 1234);
    params.insert("amount", 15);
    params.insert("brand", "VISA");
    params.insert("cardno", "xxxxxxxxxxxx1111");
    params.insert("currency", "EUR");
    params.insert("NCERROR", 0);
    params.insert("orderId", 12);
    params.insert("payid", 32100123);
    params.insert("pm", "CreditCard");
    params.insert("status", 9);
    params
}

/// The SHA-IN example: an authorization request sent to the gateway.
fn order_params() -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("amount", 1500);
    params.insert("currency", "EUR");
    params.insert("operation", "RES");
    params.insert("orderID", 1234);
    params.insert("PSPID", "MyPSPID");
    params
}

const SECRET: &str = "Mysecretsig1875!?";

#[test]
fn test_sha_out_example() {
    init_logger();

    let signature = Signature::new(callback_params(), HashAlgorithm::Sha1, SECRET)
        .unwrap()
        .with_direction(Direction::Inbound);

    assert_eq!(
        String::from_utf8(signature.preimage().unwrap()).unwrap(),
        "ACCEPTANCE=1234Mysecretsig1875!?AMOUNT=15Mysecretsig1875!?\
         BRAND=VISAMysecretsig1875!?CARDNO=xxxxxxxxxxxx1111Mysecretsig1875!?\
         CURRENCY=EURMysecretsig1875!?NCERROR=0Mysecretsig1875!?\
         ORDERID=12Mysecretsig1875!?PAYID=32100123Mysecretsig1875!?\
         PM=CreditCardMysecretsig1875!?STATUS=9Mysecretsig1875!?"
    );
    assert_eq!(
        signature.signature().unwrap(),
        "B209960D5703DD1047F95A0F97655FFE5AC8BD52"
    );
}

#[test]
fn test_sha_in_example() {
    init_logger();

    let signature = Signature::new(order_params(), HashAlgorithm::Sha1, SECRET).unwrap();

    assert_eq!(
        String::from_utf8(signature.preimage().unwrap()).unwrap(),
        "AMOUNT=1500Mysecretsig1875!?CURRENCY=EURMysecretsig1875!?\
         OPERATION=RESMysecretsig1875!?ORDERID=1234Mysecretsig1875!?\
         PSPID=MyPSPIDMysecretsig1875!?"
    );
    assert_eq!(
        signature.signature().unwrap(),
        "EB52902BCC4B50DC1250E5A7C1068ECF97751256"
    );
}

#[test]
fn test_algorithm_variants() {
    // (algorithm, expected digest over the SHA-IN example)
    let cases = vec![
        (
            HashAlgorithm::Sha1,
            "EB52902BCC4B50DC1250E5A7C1068ECF97751256",
        ),
        (
            HashAlgorithm::Sha256,
            "D14582FA75492B6C07EB216EC0EECB1EBD1E823A0EDD59364E0B37E329FD6EAC",
        ),
        (
            HashAlgorithm::Sha512,
            "FBF67CED46445E7E9720C00427EF6A306D92C8FF1AC90C813E229712F897D212\
             45BA680592B2A4DB8FF0EE32F348F79D634258C0064620D0E8604B5BFCCA76D9",
        ),
    ];

    for (algo, expected) in cases {
        let signature = Signature::new(order_params(), algo, SECRET).unwrap();
        let digest = signature.signature().unwrap();
        assert_eq!(digest, expected, "digest mismatch for {algo}");
        assert_eq!(
            digest.len(),
            algo.hex_digest_len(),
            "digest length mismatch for {algo}"
        );
    }
}

#[test]
fn test_verify_callback() {
    let signature = Signature::new(callback_params(), HashAlgorithm::Sha1, SECRET)
        .unwrap()
        .with_direction(Direction::Inbound);

    assert!(signature
        .verify("B209960D5703DD1047F95A0F97655FFE5AC8BD52")
        .unwrap());
    // Case-insensitive: gateways and merchant plugins disagree on digest
    // casing.
    assert!(signature
        .verify("b209960d5703dd1047f95a0f97655ffe5ac8bd52")
        .unwrap());

    assert!(!signature
        .verify("B209960D5703DD1047F95A0F97655FFE5AC8BD53")
        .unwrap());
    assert!(!signature.verify("").unwrap());
}

#[test]
fn test_tampered_callback_is_rejected() {
    let mut params = callback_params();
    params.insert("amount", 1_000_000);

    let signature = Signature::new(params, HashAlgorithm::Sha1, SECRET)
        .unwrap()
        .with_direction(Direction::Inbound);

    assert!(!signature
        .verify("B209960D5703DD1047F95A0F97655FFE5AC8BD52")
        .unwrap());
}

#[test]
fn test_unsigned_params_do_not_affect_digest() {
    let mut params = order_params();
    // Not in the SHA-IN list; the gateway ignores it and so must we.
    params.insert("CUSTOM_FIELD", "anything");

    let signature = Signature::new(params, HashAlgorithm::Sha1, SECRET).unwrap();
    assert_eq!(
        signature.signature().unwrap(),
        "EB52902BCC4B50DC1250E5A7C1068ECF97751256"
    );
}

#[test]
fn test_received_shasign_is_not_signed() {
    let mut params = callback_params();
    // Callbacks carry the gateway's own digest; it must never feed back
    // into the computation.
    params.insert("SHASIGN", "B209960D5703DD1047F95A0F97655FFE5AC8BD52");

    let signature = Signature::new(params, HashAlgorithm::Sha1, SECRET)
        .unwrap()
        .with_direction(Direction::Inbound);
    assert_eq!(
        signature.signature().unwrap(),
        "B209960D5703DD1047F95A0F97655FFE5AC8BD52"
    );
}

#[test]
fn test_algorithm_from_config_string() {
    let algo: HashAlgorithm = "sha512".parse().unwrap();
    let signature = Signature::new(order_params(), algo, SECRET).unwrap();
    assert_eq!(signature.signature().unwrap().len(), 128);

    assert!("md5".parse::<HashAlgorithm>().is_err());
    assert!("".parse::<HashAlgorithm>().is_err());
}
