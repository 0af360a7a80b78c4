//! Template file contents
//!
//! Generated JavaScript payloads, rendered with a small handlebars context
//! before being written into the target project.

/// Redux store wired to the RTK Query backend API
pub const STORE_RTK_QUERY: &str = r#"import { configureStore } from "@reduxjs/toolkit";
import backendApi from "./service/backendApi";
import { NODE_ENV } from "../utils/constant";

export const store = configureStore({
  reducer: {
    [backendApi.reducerPath]: backendApi.reducer,
  },
  middleware: (getDefaultMiddleware) =>
    getDefaultMiddleware({ serializableCheck: false }).concat(backendApi.middleware),
  devTools: NODE_ENV === "development",
});

export default store;
"#;

/// Base RTK Query API with auth-token header preparation
pub const BACKEND_API: &str = r#"import { createApi, fetchBaseQuery } from "@reduxjs/toolkit/query/react";
import { BASE_URL } from "../../utils/constant";

const backendApi = createApi({
  tagTypes: ["FetchMyChatList", "GetPatient"],
  baseQuery: fetchBaseQuery({
    baseUrl: BASE_URL || "{{base_url}}",
    credentials: "include",
    withCredentials: true,
    prepareHeaders: (headers, { getState }) => {
      const token = getState()?.user?.token;
      if (token) headers.set("Authorization", `Bearer ${token}`);
      return headers;
    },
  }),
  endpoints: () => ({}),
});

export default backendApi;
"#;

/// Auth endpoints injected into the backend API
pub const AUTH_SLICE_RTK_QUERY: &str = r#"import backendApi from "./backendApi";

const AuthSlice = backendApi.injectEndpoints({
  endpoints: (builder) => ({
    login: builder.mutation({
      query: (data) => ({
        url: "/auth/login",
        method: "POST",
        body: data,
      }),
    }),
    register: builder.mutation({
      query: (data) => ({
        url: "/auth/register",
        method: "POST",
        body: data,
      }),
    }),
    logout: builder.mutation({
      query: () => ({
        url: "/logout",
        method: "POST",
      }),
    }),
    forgotPassword: builder.mutation({
      query: (data) => ({
        url: "/auth/forgot-password",
        method: "POST",
        body: data,
      }),
    }),
    resetPassword: builder.mutation({
      query: (data) => ({
        url: "/reset-password",
        method: "POST",
        body: data,
      }),
    }),
    accountVerify: builder.mutation({
      query: (data) => ({
        url: "/auth/verify-account",
        method: "POST",
        body: data,
      }),
    }),
    resendOtp: builder.mutation({
      query: (data) => ({
        url: "/auth/resend-otp",
        method: "POST",
        body: data,
      }),
    }),
  }),
});

export const {
  useLoginMutation,
  useRegisterMutation,
  useLogoutMutation,
  useForgotPasswordMutation,
  useResetPasswordMutation,
  useAccountVerifyMutation,
  useResendOtpMutation,
} = AuthSlice;
"#;

/// Shared constants module
pub const CONSTANT: &str = r#"export const BASE_URL = "{{base_url}}";
export const NODE_ENV = "{{node_env}}";
"#;

/// Preconfigured axios instance
pub const AXIOS_CLIENT: &str = r#"import axios from "axios";
import { BASE_URL } from "../utils/constant";

const api = axios.create({
  baseURL: BASE_URL,
});

export default api;
"#;

/// Redux store backed by a plain auth reducer
pub const STORE_REDUCER: &str = r#"import { configureStore } from "@reduxjs/toolkit";
import authReducer from "./slices/authSlice";

export const store = configureStore({
  reducer: {
    auth: authReducer,
  },
});

export default store;
"#;

/// Plain `createSlice` auth slice
pub const AUTH_SLICE_REDUCER: &str = r#"import { createSlice } from "@reduxjs/toolkit";

const initialState = {
  user: null,
};

const authSlice = createSlice({
  name: "auth",
  initialState,
  reducers: {
    login: (state, action) => {
      state.user = action.payload;
    },
    logout: (state) => {
      state.user = null;
    },
  },
});

export const { login, logout } = authSlice.actions;
export default authSlice.reducer;
"#;
