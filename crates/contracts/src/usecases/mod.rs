pub mod u601_irpv;
