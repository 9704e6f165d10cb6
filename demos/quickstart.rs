use tai64utc::{beyond_leap_horizon, parse_tai64n, tai_minus_utc, Tai64N};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=tai64utc=trace shows rejected labels and horizon warnings.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let labels = [
        "@4000000037c219bf2ef02e94",
        "@4000000052c65e550cd675fc",
        "@f000000037c219bf2ef02e94",
    ];

    for text in labels {
        match text.parse::<Tai64N>() {
            Ok(label) => {
                println!("{text}");
                println!("  UTC:       {}", label.to_utc());
                println!("  TAI − UTC: {}", tai_minus_utc(label.secs()));
                if beyond_leap_horizon(label.secs()) {
                    println!("  note: past the leap-second table horizon");
                }
            }
            Err(err) => println!("{text}: {err}"),
        }
    }

    if let Ok(utc) = parse_tai64n("@400000000000000A00000000") {
        println!("Unix epoch: {utc}");
    }
}
