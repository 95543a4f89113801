use rust_decimal::Decimal;

quantity!(Kilowatts, via: Decimal, suffix: "kW", precision: 1);
