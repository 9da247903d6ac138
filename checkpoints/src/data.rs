//! Compiled-in checkpoint tables
//!
//! What makes a good checkpoint block: it is surrounded by blocks with reasonable timestamps (no
//! earlier block with a later timestamp, no later block with an earlier one) and contains no
//! unusual transactions. Tables are replaced wholesale between releases.

use common::Network;

pub(crate) struct NetworkData {
    /// `(height, hash)` in ascending height order
    pub checkpoints: &'static [(u64, &'static str)],
    /// Timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint
    pub last_checkpoint_tx_count: u64,
    /// Estimated transactions per day after the last checkpoint
    pub tx_per_day: f64,
}

static MAIN: NetworkData = NetworkData {
    checkpoints: &[
        (0,       "0x00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64"),
        (6143,    "0x0000000026fb51f5bc9943ed69d9ff7697ecf7fed419d88b417655f93a487ce1"),
        (12797,   "0x000000002c29644e179baa188fa6b9b9454721f1f21f2b9f31eebe9acc1a31db"),
        (30092,   "0x0000000098a23e1c503f71a6d61c333c5abaabb4c5fa1b474012e004db4bfbbe"),
        (80998,   "0x000000010ebcfe9a00a99f2b61104f4a141555a707f1c007aba8a978f6030cfb"),
        (144759,  "0x000000047e7b7bfd63b4f019a0a24c8d65b10afa6eb80721e10fa7c49ce6fb6e"),
        (189046,  "0x00000000bd507c435b46ee8a13b25b85ec38fdb0eb5b00faeaa0611cd6a483d3"),
        (277316,  "0x00000016a20503fe496e79d34fb85c33f633059315c046ffa1b4826d08a1e856"),
        (483849,  "0x000001eb7f8124282ab62296e63d3145ff6c84cf18afae4d4b8e02cd3182b6a8"),
        (1066428, "0x000000012dc5256d977b50270d1ca5642726308dcf26b6c219985edb8f2ab8f6"),
    ],
    last_checkpoint_time: 1_490_629_503,
    last_checkpoint_tx_count: 1_179_921,
    tx_per_day: 960.0,
};

static TEST: NetworkData = NetworkData {
    checkpoints: &[
        (0, "0x0000082f5939c2154dbcba35f784530d12e9d72472fcfaf29674ea312cdf4c83"),
    ],
    last_checkpoint_time: 1_388_868_139,
    last_checkpoint_tx_count: 0,
    tx_per_day: 960.0,
};

static REGTEST: NetworkData = NetworkData {
    checkpoints: &[
        (0, "0x000008ca1832a4baf228eb1553c03d3a2c8e02399550dd6ea8d65cec3ef23d2e"),
    ],
    last_checkpoint_time: 0,
    last_checkpoint_tx_count: 0,
    tx_per_day: 0.0,
};

pub(crate) fn for_network(network: Network) -> &'static NetworkData {
    match network {
        Network::Main => &MAIN,
        Network::Test => &TEST,
        Network::Regtest => &REGTEST,
    }
}
