//! End-to-end derivation tests

use hdkey::address::{p2pkh_address, Network};
use hdkey::bip32::{ExtendedPrivateKey, ExtendedPublicKey};
use hdkey::mnemonic::mnemonic_to_seed;

const MNEMONIC: &str =
    "coral dwarf hidden repeat turtle ski bounce this solar round author exhibit";
const PATH: &str = "m/44'/0'/0'/0/0";

#[test]
fn test_bitcoin_address_generation() {
    let seed = mnemonic_to_seed(MNEMONIC, None).unwrap();
    let root = ExtendedPrivateKey::from_seed(&seed).unwrap();

    assert_eq!(
        root.private_key_hex(),
        "5aa893a5df933e17d11613310d9cd06d9b4dcb1472128979ec9377d03e9cfe6b"
    );
    assert_eq!(
        root.public_key_hex(),
        "02f2ae76a09d7659108d041b3fd39d459939e1595ec31f7a473d85ed15ef7f5508"
    );

    let child = root.derive_path(PATH).unwrap();
    assert_eq!(
        child.private_key_hex(),
        "5e03c33c444418713ceae0445f725333a1b2482f1565075b55f0870c02b9262b"
    );
    assert_eq!(
        child.public_key_hex(),
        "02db7280c5e69d0e738339d6107fa5e6cf3a7ae2a85b4cd8c585d6853370720d23"
    );

    let address = p2pkh_address(&child.public_key_bytes(), Network::Mainnet).unwrap();
    assert_eq!(address, "19ttVzDq8dnJKhBiQhpVTpJs3UoBHPpsjh");
}

#[test]
fn test_watch_only_account_addresses_match() {
    let seed = mnemonic_to_seed(MNEMONIC, None).unwrap();
    let root = ExtendedPrivateKey::from_seed(&seed).unwrap();

    // Hardened prefix needs the private key; the external chain below the
    // account can then be followed from the xpub alone.
    let account = root.derive_path("m/44'/0'/0'").unwrap();
    let watch_only = ExtendedPublicKey::from_parts(
        &account.public_key_bytes(),
        *account.chain_code(),
    )
    .unwrap();

    for index in 0..3u32 {
        let path = format!("m/0/{}", index);
        let from_private = account.derive_path(&path).unwrap();
        let from_public = watch_only.derive_path(&path).unwrap();

        assert_eq!(from_private.public_key_bytes(), from_public.public_key_bytes());
        assert_eq!(
            p2pkh_address(&from_private.public_key_bytes(), Network::Mainnet).unwrap(),
            p2pkh_address(&from_public.public_key_bytes(), Network::Mainnet).unwrap()
        );
    }
}

#[test]
fn test_watch_only_rejects_hardened_paths() {
    let seed = mnemonic_to_seed(MNEMONIC, None).unwrap();
    let root = ExtendedPrivateKey::from_seed(&seed).unwrap();

    let err = root.to_public().derive_path(PATH).unwrap_err();
    assert!(matches!(err, hdkey::Error::HardenedDerivationUnsupported));
}
