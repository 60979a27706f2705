/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Authenticated HTTP request executor
pub mod http;
/// Typed request bodies for the documented endpoints
pub mod requests;
/// Retry configuration for HTTP requests
pub mod retry;
