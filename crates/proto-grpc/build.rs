fn main() {
    #[cfg(feature = "generate")]
    generate::main();
}

#[cfg(feature = "generate")]
mod generate {
    pub fn main() {
        tonic_build::configure()
            .build_client(true)
            .build_server(true)
            .extern_path(".fivetran_sdk.v2", "::proto_fivetran::v2")
            .out_dir("src")
            .compile_protos(
                &["../proto-fivetran/proto/fivetran_sdk/v2/destination.proto"],
                &["../proto-fivetran/proto"],
            )
            .expect("failed to compile fivetran_sdk service stubs");
    }
}
