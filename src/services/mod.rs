// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod run_duel;
pub mod summary;

pub use run_duel::{
    ApiError, RunDuelClient, Session, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};
pub use summary::aggregate;
