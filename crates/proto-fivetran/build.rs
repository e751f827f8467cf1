fn main() {
    #[cfg(feature = "generate")]
    generate::main();
}

#[cfg(feature = "generate")]
mod generate {
    pub fn main() {
        let mut config = prost_build::Config::new();
        config
            .compile_well_known_types()
            .extern_path(".google.protobuf", "::pbjson_types")
            .out_dir("src");

        config
            .compile_protos(&["proto/fivetran_sdk/v2/destination.proto"], &["proto"])
            .expect("failed to compile fivetran_sdk protobuf");
    }
}
