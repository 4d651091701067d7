fn main() {
    dioxus::launch(spectra_web::App);
}
