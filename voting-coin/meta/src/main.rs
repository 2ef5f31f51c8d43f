fn main() {
    multiversx_sc_meta_lib::cli_main::<voting_coin::AbiProvider>();
}
