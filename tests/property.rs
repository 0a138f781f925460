mod property {
    mod grammar;
    mod manifest;
}
